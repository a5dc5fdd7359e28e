use crate::ports::{HostResolver, LookupResult};
use ferrous_dnscache_domain::{DomainError, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

pub struct LookupHostUseCase {
    resolver: Arc<dyn HostResolver>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves `host`; `None` asks for both address families.
    pub async fn execute(
        &self,
        host: &str,
        record_type: Option<RecordType>,
    ) -> Result<LookupResult, DomainError> {
        validate_host(host)?;

        let start = Instant::now();
        let result = match record_type {
            Some(record_type) => self.resolver.lookup(host, record_type).await?,
            None => self.resolver.lookup_ip(host).await?,
        };

        let elapsed_us = start.elapsed().as_micros() as u64;
        if result.is_empty() {
            debug!(host = %host, elapsed_us, "Lookup returned no addresses");
        } else {
            info!(
                host = %host,
                addresses = result.addresses.len(),
                elapsed_us,
                "Lookup resolved"
            );
        }

        Ok(result)
    }
}

fn validate_host(host: &str) -> Result<(), DomainError> {
    let name = host.strip_suffix('.').unwrap_or(host);

    if name.is_empty() {
        return Err(DomainError::InvalidDomainName("empty host name".to_string()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "host name longer than {} bytes: {}",
            MAX_NAME_LEN, host
        )));
    }
    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "invalid label in host name: {}",
                host
            )));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(DomainError::InvalidDomainName(format!(
                "invalid character in host name: {}",
                host
            )));
        }
    }

    Ok(())
}
