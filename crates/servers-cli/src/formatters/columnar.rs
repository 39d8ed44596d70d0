use servers_core::types::Server;

/// Default rendering: one line per server, `<environment> <name> <tags>`
/// with the tag list bracketed and space-joined.
pub fn print(servers: &[Server]) {
    for line in render(servers) {
        println!("{}", line);
    }
}

fn render(servers: &[Server]) -> Vec<String> {
    servers
        .iter()
        .map(|s| format!("{} {} [{}]", s.environment, s.name, s.tags.join(" ")))
        .collect()
}
