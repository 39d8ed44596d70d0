use servers_core::types::Server;

pub fn print(servers: &[Server]) {
    println!("{}", render(servers));
}

fn render(servers: &[Server]) -> String {
    servers
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
