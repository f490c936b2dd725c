//! Indian-rupee price formatting
//!
//! Prices render in the Indian numbering system: the last three digits
//! form one group, everything above them groups in pairs. 3,499,000
//! rupees therefore prints as "₹34,99,000" (34.99 lakh), not
//! "₹3,499,000". Amounts are whole rupees; no paise, no decimals.

/// Format a whole-rupee amount with the rupee sign and Indian grouping.
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Insert Indian-system separators: last three digits, then pairs.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();

    format!("{},{}", pairs.join(","), tail)
}
