use crate::RecordType;
use compact_str::CompactString;
use std::fmt;

/// Cache key: a canonical fully-qualified name plus an address record type.
///
/// Names are ASCII-lowercased and always carry the trailing root label
/// separator, so `Example.COM` and `example.com.` hash to the same slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Question {
    fqdn: CompactString,
    record_type: RecordType,
}

impl Question {
    pub fn new(name: &str, record_type: RecordType) -> Self {
        let mut fqdn = CompactString::with_capacity(name.len() + 1);
        for c in name.chars() {
            fqdn.push(c.to_ascii_lowercase());
        }
        if !fqdn.ends_with('.') {
            fqdn.push('.');
        }
        Self { fqdn, record_type }
    }

    #[inline]
    pub fn fqdn(&self) -> &str {
        self.fqdn.as_str()
    }

    #[inline]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fqdn, self.record_type)
    }
}
