// Ordered, deduplicated form lists.
//
// Inflection results are lists of co-valid surface forms; insertion order
// is meaningful (index 0 is the preferred form), so deduplication must
// keep the first occurrence.

/// Deduplicate while preserving first-occurrence order.
pub(crate) fn dedup(forms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(forms.len());
    for form in forms {
        if !out.contains(&form) {
            out.push(form);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let forms = vec![
            "горой".to_string(),
            "горою".to_string(),
            "горой".to_string(),
        ];
        assert_eq!(dedup(forms), vec!["горой", "горою"]);
    }

    #[test]
    fn empty_is_empty() {
        assert!(dedup(Vec::new()).is_empty());
    }
}
