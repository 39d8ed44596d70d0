use crate::types::Server;

/// Filter an inventory by environment and tag predicates.
///
/// The environment filter runs first (skipped when `environment` is empty),
/// then every tag token in supplied order. A token may hold several
/// comma-separated sub-tags; each sub-tag is its own pass over the current
/// survivors, so passes compose as logical AND. A `!` prefix negates a
/// sub-tag. Every pass builds a fresh vec and preserves relative order.
pub fn filter_servers(servers: Vec<Server>, environment: &str, tags: &[String]) -> Vec<Server> {
    let mut servers = servers;
    if !environment.is_empty() {
        servers = servers
            .into_iter()
            .filter(|s| s.environment == environment)
            .collect();
    }
    for token in tags {
        for sub_tag in token.split(',') {
            servers = filter_by_tag(servers, sub_tag);
        }
    }
    servers
}

fn filter_by_tag(servers: Vec<Server>, tag: &str) -> Vec<Server> {
    match tag.strip_prefix('!') {
        Some(excluded) => servers
            .into_iter()
            .filter(|s| !has_tag(s, excluded))
            .collect(),
        None => servers.into_iter().filter(|s| has_tag(s, tag)).collect(),
    }
}

fn has_tag(server: &Server, tag: &str) -> bool {
    server.tags.iter().any(|t| t == tag)
}
