quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum ConfigError {
        InvalidConfiguration(types: Vec<String>) {
            description("Unsupported sentence type")
            display("Unsupported sentence type(s): {}", types.join(", "))
        }
    }
}
