use super::RequestDescriptor;

/// Renders a descriptor as a multi-line cURL command. Best-effort inverse of
/// `parse_command`: header order follows the descriptor and quote style is
/// fixed, so the output need not be byte-identical to an originally pasted
/// command. The body is emitted only for methods that carry one.
pub fn to_command(descriptor: &RequestDescriptor) -> String {
    let mut command = format!("curl -X {} \"{}\"", descriptor.method, descriptor.url);

    for (name, value) in &descriptor.headers {
        command.push_str(&format!(" \\\n  -H \"{}: {}\"", name, value));
    }

    if descriptor.method.allows_body() && !descriptor.body.trim().is_empty() {
        command.push_str(&format!(
            " \\\n  -d '{}'",
            descriptor.body.replace('\'', "\\'")
        ));
    }

    command
}
