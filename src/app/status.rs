use mouflow::Config;

pub fn render_status(config: &Config) -> String {
    let lines = [
        format!("◆ {}", t!("status.title")),
        String::new(),
        format!("  {}        {}", t!("status.version"), env!("CARGO_PKG_VERSION")),
        format!(
            "  {}         {}",
            t!("status.config"),
            config.config_path.display()
        ),
        format!("  {}        {}", t!("status.base_url"), config.service.base_url),
        format!(
            "  {}  {}",
            t!("status.submit_policy"),
            config.approvals.submit_policy
        ),
        format!(
            "  {}      {}",
            t!("status.log_level"),
            config.observability.log_level
        ),
    ];
    lines.join("\n")
}
