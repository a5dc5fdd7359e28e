#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_dnscache_application::ports::{DialFn, Dialer, DnsConn};
use ferrous_dnscache_domain::Network;
use futures::FutureExt;
use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// What a [`FakeConn`] saw, shared with the test after the conn is boxed away.
#[derive(Default)]
pub struct ConnLog {
    pub writes: Mutex<Vec<Vec<u8>>>,
    pub closes: AtomicUsize,
    pub read_deadline: Mutex<Option<Instant>>,
    pub write_deadline: Mutex<Option<Instant>>,
}

impl ConnLog {
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().unwrap().clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// Scripted connection: reads hand out queued chunks, then report EOF.
pub struct FakeConn {
    log: Arc<ConnLog>,
    reads: VecDeque<io::Result<Vec<u8>>>,
    close_error: Option<io::Error>,
    local: SocketAddr,
    peer: SocketAddr,
}

impl FakeConn {
    pub fn new(log: Arc<ConnLog>) -> Self {
        Self {
            log,
            reads: VecDeque::new(),
            close_error: None,
            local: "127.0.0.1:40000".parse().unwrap(),
            peer: "192.0.2.53:53".parse().unwrap(),
        }
    }

    pub fn responding(log: Arc<ConnLog>, response: Vec<u8>) -> Self {
        Self::new(log).with_read(response)
    }

    pub fn with_read(mut self, chunk: Vec<u8>) -> Self {
        self.reads.push_back(Ok(chunk));
        self
    }

    pub fn with_read_error(mut self, kind: io::ErrorKind) -> Self {
        self.reads
            .push_back(Err(io::Error::new(kind, "scripted read failure")));
        self
    }

    pub fn with_close_error(mut self, kind: io::ErrorKind) -> Self {
        self.close_error = Some(io::Error::new(kind, "scripted close failure"));
        self
    }

    pub fn local(&self) -> SocketAddr {
        self.local
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }
}

#[async_trait]
impl DnsConn for FakeConn {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.log.writes.lock().unwrap().push(buf.to_vec());
        Ok(buf.len())
    }

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.reads.pop_front() {
            Some(Ok(chunk)) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.reads.push_front(Ok(chunk[n..].to_vec()));
                }
                Ok(n)
            }
            Some(Err(e)) => Err(e),
            None => Ok(0),
        }
    }

    async fn read_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let n = self.read(buf).await?;
        Ok((n, self.peer))
    }

    async fn close(&mut self) -> io::Result<()> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        match self.close_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        Some(self.local)
    }

    fn peer_addr(&self) -> Option<SocketAddr> {
        Some(self.peer)
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        *self.log.read_deadline.lock().unwrap() = deadline;
        Ok(())
    }

    fn set_write_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        *self.log.write_deadline.lock().unwrap() = deadline;
        Ok(())
    }
}

/// Dial function handing out `conn` once, counting invocations in `dials`.
pub fn counting_dial(conn: FakeConn, dials: Arc<AtomicUsize>) -> DialFn {
    Box::new(move || {
        async move {
            dials.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(conn) as Box<dyn DnsConn>)
        }
        .boxed()
    })
}

/// Dialer whose connections answer each written query through `respond`.
pub struct FakeDialer {
    pub dials: AtomicUsize,
    pub log: Arc<ConnLog>,
    respond: Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>,
}

impl FakeDialer {
    pub fn new(respond: impl Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static) -> Self {
        Self {
            dials: AtomicUsize::new(0),
            log: Arc::new(ConnLog::default()),
            respond: Arc::new(respond),
        }
    }

    pub fn dials(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dialer for FakeDialer {
    async fn dial(&self, _network: Network, _addr: SocketAddr) -> io::Result<Box<dyn DnsConn>> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(EchoingConn {
            log: Arc::clone(&self.log),
            respond: Arc::clone(&self.respond),
            pending: None,
        }))
    }
}

/// Answers whatever query was written with the dialer's response function.
struct EchoingConn {
    log: Arc<ConnLog>,
    respond: Arc<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>,
    pending: Option<Vec<u8>>,
}

#[async_trait]
impl DnsConn for EchoingConn {
    async fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.log.writes.lock().unwrap().push(buf.to_vec());
        self.pending = Some((self.respond)(buf));
        Ok(buf.len())
    }

    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(response) = self.pending.take() else {
            return Ok(0);
        };
        let n = response.len().min(buf.len());
        buf[..n].copy_from_slice(&response[..n]);
        if n < response.len() {
            self.pending = Some(response[n..].to_vec());
        }
        Ok(n)
    }

    async fn read_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        let n = self.read(buf).await?;
        Ok((n, "192.0.2.53:53".parse().unwrap()))
    }

    async fn close(&mut self) -> io::Result<()> {
        self.log.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        None
    }

    fn peer_addr(&self) -> Option<SocketAddr> {
        None
    }

    fn set_read_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        *self.log.read_deadline.lock().unwrap() = deadline;
        Ok(())
    }

    fn set_write_deadline(&mut self, deadline: Option<Instant>) -> io::Result<()> {
        *self.log.write_deadline.lock().unwrap() = deadline;
        Ok(())
    }
}
