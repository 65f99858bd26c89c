const LOGGER_CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(LOGGER_CONFIG_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load '{}': {}",
            LOGGER_CONFIG_FILE, e
        );
    }
}

pub fn log_code_table(code_table: &crate::huffman::CodeTable) {
    for (symbol, code) in code_table.iter() {
        log::debug!("{:?} -> {}", symbol, code);
    }
}
