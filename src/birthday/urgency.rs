use std::fmt;

/// Presentation bucket derived from the days left until a birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Today,
    Tomorrow,
    /// Less than 30 days
    VerySoon,
    /// Less than 90 days
    Normal,
    /// Less than 180 days
    LessSoon,
    Distant,
}

impl Urgency {
    /// Classify by the number of days until the next birthday
    pub fn classify(days_until: i64) -> Self {
        match days_until {
            ..=0 => Urgency::Today,
            1 => Urgency::Tomorrow,
            2..30 => Urgency::VerySoon,
            30..90 => Urgency::Normal,
            90..180 => Urgency::LessSoon,
            _ => Urgency::Distant,
        }
    }

    /// Style class name; empty for `Normal`
    pub fn class_name(self) -> &'static str {
        match self {
            Urgency::Today => "today",
            Urgency::Tomorrow => "tomorrow",
            Urgency::VerySoon => "verySoon",
            Urgency::Normal => "",
            Urgency::LessSoon => "lessSoon",
            Urgency::Distant => "distant",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(Urgency::classify(0), Urgency::Today);
        assert_eq!(Urgency::classify(1), Urgency::Tomorrow);
        assert_eq!(Urgency::classify(2), Urgency::VerySoon);
        assert_eq!(Urgency::classify(29), Urgency::VerySoon);
        assert_eq!(Urgency::classify(30), Urgency::Normal);
        assert_eq!(Urgency::classify(89), Urgency::Normal);
        assert_eq!(Urgency::classify(90), Urgency::LessSoon);
        assert_eq!(Urgency::classify(179), Urgency::LessSoon);
        assert_eq!(Urgency::classify(180), Urgency::Distant);
        assert_eq!(Urgency::classify(365), Urgency::Distant);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(Urgency::VerySoon.class_name(), "verySoon");
        assert_eq!(Urgency::Normal.to_string(), "");
        assert_eq!(Urgency::LessSoon.to_string(), "lessSoon");
    }
}
