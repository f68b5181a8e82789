const MAX_VISIBLE_LENGTH: usize = 160;

const SECRET_PARAMS: [&str; 6] = [
    "token",
    "access_token",
    "api_key",
    "key",
    "signature",
    "x-amz-signature",
];

/// Sanitizes an audio reference for logging: secret-bearing query values are
/// redacted and long references truncated.
pub fn sanitize_reference(reference: &str) -> String {
    let trimmed = reference.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_query_secrets(trimmed);

    if redacted.chars().count() > MAX_VISIBLE_LENGTH {
        let visible: String = redacted.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, redacted.chars().count())
    } else {
        redacted
    }
}

fn redact_query_secrets(reference: &str) -> String {
    let Some((base, query)) = reference.split_once('?') else {
        return reference.to_string();
    };

    let (query, fragment) = match query.split_once('#') {
        Some((q, f)) => (q, Some(f)),
        None => (query, None),
    };

    let pairs: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if is_secret(name) => format!("{}=[REDACTED]", name),
            _ => pair.to_string(),
        })
        .collect();

    let mut result = format!("{}?{}", base, pairs.join("&"));
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    result
}

fn is_secret(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SECRET_PARAMS.iter().any(|secret| lower == *secret)
}
