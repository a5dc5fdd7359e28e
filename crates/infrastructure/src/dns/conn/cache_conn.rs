use super::error::CacheConnError;
use crate::dns::codec::{QueryParser, QueryShape, ResponseBuilder, ResponseParser};
use async_trait::async_trait;
use ferrous_dnscache_application::ports::{DialFn, DnsConn, QuestionCache};
use ferrous_dnscache_domain::Answer;
use std::io::{self, Cursor, Read};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::debug;

enum ConnState {
    /// Nothing written yet.
    Fresh,
    /// Answered from cache; reads drain the synthesized response.
    Hit(Cursor<Vec<u8>>),
    /// Forwarded to a real connection; every byte read is kept for the cache.
    Miss {
        conn: Box<dyn DnsConn>,
        response: Vec<u8>,
    },
    Closed,
}

/// Connection that answers single A/AAAA queries from a [`QuestionCache`]
/// and only dials the real upstream when it has to.
///
/// One instance serves one query: write, any number of reads, then close.
/// On close after a miss the upstream response is parsed and stored.
pub struct CacheConn {
    cache: Arc<dyn QuestionCache>,
    dial: Option<DialFn>,
    state: ConnState,
    read_deadline: Option<Instant>,
    write_deadline: Option<Instant>,
}

impl CacheConn {
    pub fn new(cache: Arc<dyn QuestionCache>, dial: DialFn) -> Self {
        Self {
            cache,
            dial: Some(dial),
            state: ConnState::Fresh,
            read_deadline: None,
            write_deadline: None,
        }
    }

    /// Whether the written query was served without touching the network.
    pub fn is_cache_hit(&self) -> bool {
        matches!(self.state, ConnState::Hit(_))
    }

    /// Whether a real connection is currently held.
    pub fn is_dialed(&self) -> bool {
        matches!(self.state, ConnState::Miss { .. })
    }

    async fn forward(&mut self, buf: &[u8]) -> io::Result<usize> {
        let dial = self.dial.take().ok_or(CacheConnError::Closed)?;

        let mut conn = match dial().await {
            Ok(conn) => conn,
            Err(e) => {
                self.state = ConnState::Closed;
                return Err(e);
            }
        };

        // Deadlines queued before the dial apply from here on.
        let deadlines = (
            conn.set_read_deadline(self.read_deadline.take()),
            conn.set_write_deadline(self.write_deadline.take()),
        );

        let written = match deadlines {
            (Ok(()), Ok(())) => conn.write(buf).await,
            (Err(e), _) | (_, Err(e)) => Err(e),
        };

        self.state = ConnState::Miss {
            conn,
            response: Vec::new(),
        };
        written
    }

    /// Stores the upstream answer collected during a miss, if it is cacheable.
    fn populate(&self, response: &[u8]) -> Result<(), CacheConnError> {
        if response.is_empty() {
            debug!("No upstream response to cache");
            return Ok(());
        }

        let parsed = ResponseParser::parse(response).map_err(CacheConnError::InvalidResponse)?;

        let Some(question) = parsed.single_question() else {
            debug!(
                questions = parsed.questions.len(),
                "Response not cacheable: not a single A/AAAA question"
            );
            return Ok(());
        };

        if parsed.truncated || parsed.records.is_empty() {
            debug!(
                question = %question,
                truncated = parsed.truncated,
                rcode = ?parsed.rcode,
                "Response carries no complete address answer, not caching"
            );
            return Ok(());
        }

        let answer = Answer::from_records(&question, &parsed.records, std::time::Instant::now())
            .map_err(CacheConnError::InvalidAnswer)?;

        if answer.is_expired() {
            debug!(question = %question, "Upstream answer has zero TTL, not caching");
            return Ok(());
        }

        debug!(
            question = %question,
            ttl = answer.ttl_secs(),
            addresses = answer.addresses.len(),
            "Caching upstream answer"
        );
        self.cache.set(question, answer);
        Ok(())
    }
}

#[async_trait]
impl DnsConn for CacheConn {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.state {
            ConnState::Fresh => {}
            ConnState::Miss { conn, .. } => return conn.write(buf).await,
            ConnState::Hit(_) => return Err(CacheConnError::AlreadyAnswered.into()),
            ConnState::Closed => return Err(CacheConnError::Closed.into()),
        }

        let query = QueryParser::parse(buf).map_err(CacheConnError::InvalidQuery)?;

        let question = match query.shape() {
            QueryShape::Cacheable(question) => question,
            QueryShape::MultiQuestion(count) => {
                debug!(questions = count, "Bypassing cache for multi-question query");
                return self.forward(buf).await;
            }
            QueryShape::UnsupportedType(code) => {
                debug!(qtype = code, "Bypassing cache for unsupported record type");
                return self.forward(buf).await;
            }
        };

        let Some(answer) = self.cache.get(&question) else {
            debug!(question = %question, "Cache miss");
            return self.forward(buf).await;
        };

        let response = ResponseBuilder::build_cached(&query, &question, &answer)
            .map_err(CacheConnError::CacheInconsistency)?;

        debug!(
            question = %question,
            id = query.id(),
            addresses = answer.addresses.len(),
            "Cache hit"
        );
        self.state = ConnState::Hit(Cursor::new(response));
        Ok(buf.len())
    }

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.state {
            ConnState::Hit(cached) => cached.read(buf),
            ConnState::Miss { conn, response } => {
                let n = conn.read(buf).await?;
                response.extend_from_slice(&buf[..n]);
                Ok(n)
            }
            ConnState::Fresh => Err(CacheConnError::NotWritten.into()),
            ConnState::Closed => Err(CacheConnError::Closed.into()),
        }
    }

    async fn read_from(&mut self, _buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        Err(CacheConnError::Unsupported("read_from").into())
    }

    async fn close(&mut self) -> io::Result<()> {
        let ConnState::Miss { mut conn, response } =
            std::mem::replace(&mut self.state, ConnState::Closed)
        else {
            return Ok(());
        };

        let mut errors = Vec::new();
        if let Err(e) = self.populate(&response) {
            errors.push(e);
        }
        if let Err(e) = conn.close().await {
            errors.push(CacheConnError::CloseTransport(e));
        }

        match CacheConnError::join(errors) {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        match &self.state {
            ConnState::Miss { conn, .. } => conn.local_addr(),
            _ => None,
        }
    }

    fn peer_addr(&self) -> Option<SocketAddr> {
        match &self.state {
            ConnState::Miss { conn, .. } => conn.peer_addr(),
            _ => None,
        }
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        match &mut self.state {
            ConnState::Miss { conn, .. } => conn.set_read_deadline(deadline),
            ConnState::Fresh => {
                self.read_deadline = deadline;
                Ok(())
            }
            ConnState::Hit(_) | ConnState::Closed => Ok(()),
        }
    }

    fn set_write_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        match &mut self.state {
            ConnState::Miss { conn, .. } => conn.set_write_deadline(deadline),
            ConnState::Fresh => {
                self.write_deadline = deadline;
                Ok(())
            }
            ConnState::Hit(_) | ConnState::Closed => Ok(()),
        }
    }
}
