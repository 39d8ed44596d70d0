use servers_core::types::Server;

/// Indented JSON rendering. A serialization failure is reported but does
/// not abort the run; the call simply produces no output.
pub fn print(servers: &[Server]) {
    match serde_json::to_string_pretty(servers) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values_and_order() {
        let servers = vec![
            Server {
                name: "a".into(),
                environment: "prod".into(),
                tags: vec!["x".into(), "y".into()],
            },
            Server {
                name: "b".into(),
                environment: "dev".into(),
                tags: vec![],
            },
        ];
        let json = serde_json::to_string_pretty(&servers).unwrap();
        let parsed: Vec<Server> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, servers);
    }

    #[test]
    fn emits_fields_in_declaration_order() {
        let servers = vec![Server {
            name: "a".into(),
            environment: "prod".into(),
            tags: vec!["x".into()],
        }];
        let json = serde_json::to_string_pretty(&servers).unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let env_at = json.find("\"environment\"").unwrap();
        let tags_at = json.find("\"tags\"").unwrap();
        assert!(name_at < env_at && env_at < tags_at);
    }

    #[test]
    fn uses_two_space_indentation() {
        let servers = vec![Server {
            name: "a".into(),
            environment: "prod".into(),
            tags: vec![],
        }];
        let json = serde_json::to_string_pretty(&servers).unwrap();
        assert!(json.contains("\n  {"));
        assert!(json.contains("\n    \"name\""));
    }
}
