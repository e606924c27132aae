/// One event from the feed. Never mutated once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    pub magnitude: f64,
    pub location: String,
    pub time_ms: i64,
    pub detail_url: String,
}

impl Earthquake {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        time_ms: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            time_ms,
            detail_url: detail_url.into(),
        }
    }

    pub fn bucket(&self) -> MagnitudeBucket {
        MagnitudeBucket::from_magnitude(self.magnitude)
    }
}

/// Display classification of a magnitude, used to pick the badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MagnitudeBucket {
    Level(u8),
    TenPlus,
}

impl MagnitudeBucket {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 10.0 {
            return Self::TenPlus;
        }
        if magnitude.is_nan() || magnitude < 0.0 {
            return Self::Level(0);
        }
        Self::Level(magnitude.floor().min(9.0) as u8)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Level(n) => n.to_string(),
            Self::TenPlus => "10+".to_string(),
        }
    }
}

impl std::fmt::Display for MagnitudeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_floor_and_clamp() {
        assert_eq!(MagnitudeBucket::from_magnitude(1.9), MagnitudeBucket::Level(1));
        assert_eq!(MagnitudeBucket::from_magnitude(9.9), MagnitudeBucket::Level(9));
        assert_eq!(MagnitudeBucket::from_magnitude(10.0), MagnitudeBucket::TenPlus);
        assert_eq!(MagnitudeBucket::from_magnitude(10.2), MagnitudeBucket::TenPlus);
        assert_eq!(MagnitudeBucket::from_magnitude(-0.5), MagnitudeBucket::Level(0));
        assert_eq!(MagnitudeBucket::from_magnitude(f64::NAN), MagnitudeBucket::Level(0));
    }

    #[test]
    fn bucket_labels() {
        assert_eq!(MagnitudeBucket::Level(4).to_string(), "4");
        assert_eq!(MagnitudeBucket::TenPlus.to_string(), "10+");
    }
}
