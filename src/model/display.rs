//! Fallback texts for absent record fields.

use super::Feedback;

/// `"N/A"` for absent or empty text.
pub fn or_na(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "N/A",
    }
}

impl Feedback {
    /// Sender name, or `"Anonymous"`.
    pub fn sender(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Anonymous",
        }
    }

    /// Rating rounded and clamped to `0..=5`; absent or non-finite is 0.
    pub fn star_count(&self) -> u8 {
        match self.rating {
            Some(rating) if rating.is_finite() => rating.round().clamp(0.0, 5.0) as u8,
            _ => 0,
        }
    }

    /// Rating drawn as five stars, filled up to the rating.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.star_count());
        "★".repeat(filled) + &"☆".repeat(5 - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_renders_na() {
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(Some("Cardiology")), "Cardiology");
    }

    #[test]
    fn feedback_defaults() {
        let feedback = Feedback {
            rating: Some(3.0),
            ..Feedback::default()
        };
        assert_eq!(feedback.sender(), "Anonymous");
        assert_eq!(feedback.stars(), "★★★☆☆");
        assert_eq!(Feedback::default().stars(), "☆☆☆☆☆");
    }

    #[test]
    fn odd_ratings_are_clamped() {
        let rated = |rating: f64| Feedback {
            rating: Some(rating),
            ..Feedback::default()
        };
        assert_eq!(rated(4.5).star_count(), 5);
        assert_eq!(rated(4.4).star_count(), 4);
        assert_eq!(rated(12.0).stars(), "★★★★★");
        assert_eq!(rated(-1.0).star_count(), 0);
        assert_eq!(rated(f64::NAN).star_count(), 0);
    }
}
