use std::{fmt, str::FromStr};

use crate::Error;

/// A `major.minor.patch` version as reported by the host engine.
/// Missing components default to zero, so `"0.8"` parses as `0.8.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EngineVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for EngineVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u32; 3];
        let mut components = s.trim().split('.');
        for (i, slot) in parts.iter_mut().enumerate() {
            match components.next() {
                Some(component) => {
                    *slot = component
                        .parse()
                        .map_err(|_| Error::InvalidEngineVersion(s.to_string()))?;
                }
                None if i > 0 => break,
                None => return Err(Error::InvalidEngineVersion(s.to_string())),
            }
        }
        if components.next().is_some() {
            return Err(Error::InvalidEngineVersion(s.to_string()));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_full_and_partial_versions() {
        assert_eq!(
            "1.0.0".parse::<EngineVersion>().unwrap(),
            EngineVersion::new(1, 0, 0)
        );
        assert_eq!(
            "0.8".parse::<EngineVersion>().unwrap(),
            EngineVersion::new(0, 8, 0)
        );
    }

    #[test]
    fn orders_numerically() {
        let old: EngineVersion = "0.7.9".parse().unwrap();
        let min: EngineVersion = "0.8.0".parse().unwrap();
        let new: EngineVersion = "1.0.0".parse().unwrap();
        assert!(old < min);
        assert!(min < new);
    }

    #[test]
    fn rejects_junk() {
        assert!("".parse::<EngineVersion>().is_err());
        assert!("a.b".parse::<EngineVersion>().is_err());
        assert!("1.2.3.4".parse::<EngineVersion>().is_err());
    }
}
