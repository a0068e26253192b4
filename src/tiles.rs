#[derive(Debug, Clone, PartialEq)]
pub struct InfoTile {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

// Decorative only; nothing here is wired to a real pipeline.
pub const INFO_TILES: &[InfoTile] = &[
    InfoTile { icon: "🐳", title: "Docker", caption: "Containerized Application" },
    InfoTile { icon: "☸️", title: "Kubernetes", caption: "Orchestration Platform" },
    InfoTile { icon: "🔄", title: "CI/CD", caption: "Jenkins Pipeline" },
    InfoTile { icon: "📊", title: "Monitoring", caption: "Prometheus & Grafana" },
];

impl InfoTile {
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_tiles_in_fixed_order() {
        let titles: Vec<_> = INFO_TILES.iter().map(|t| t.title).collect();
        assert_eq!(titles, ["Docker", "Kubernetes", "CI/CD", "Monitoring"]);
    }

    #[test]
    fn heading_joins_icon_and_title() {
        assert_eq!(INFO_TILES[0].heading(), "🐳 Docker");
        assert_eq!(INFO_TILES[3].caption, "Prometheus & Grafana");
    }
}
