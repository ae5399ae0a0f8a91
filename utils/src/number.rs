//! Digit grouping for counts shown to users (`1234567` -> `1,234,567`).

/// Format an integer with `,` between every group of three digits.
pub fn group_thousands<I: itoa::Integer>(n: I) -> String {
    let mut buf = itoa::Buffer::new();
    let text = buf.format(n);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let mut out = String::with_capacity(text.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
