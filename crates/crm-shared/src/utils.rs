//! Utility functions

/// Masks a phone number for log output, keeping only the last four digits.
pub fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() <= 4 {
        return "***".to_string();
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("***{}", tail)
}

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        if local.len() <= 2 {
            format!("{}***{}", &local[..1], domain)
        } else {
            format!("{}***{}", &local[..2], domain)
        }
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_phone_keeps_tail() {
        assert_eq!(mask_phone("61999998888"), "***8888");
        assert_eq!(mask_phone("123"), "***");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("maria@example.com"), "ma***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
