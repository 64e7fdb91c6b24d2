#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{ Path, PathBuf };

    use crate::config::{ ConfigError, DocsConfig, RendererKind, KROKI_URL_ENV, RENDERER_ENV };

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.spec_file, PathBuf::from("android_app_specs.json"));
        assert_eq!(config.diagram.png_file, PathBuf::from("architecture_diagram.png"));
        assert_eq!(config.diagram.svg_file, PathBuf::from("architecture_diagram.svg"));
        assert_eq!((config.diagram.width, config.diagram.height), (1400, 1000));
        assert_eq!(config.renderer.kind, RendererKind::Mmdc);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.yaml");
        std::fs::write(
            &path,
            "output_dir: build/docs\nrenderer:\n  kind: kroki\n  timeout_secs: 10\ndiagram:\n  width: 2000\n"
        ).unwrap();

        let config = DocsConfig::from_file(&path).unwrap();

        assert_eq!(config.renderer.kind, RendererKind::Kroki);
        assert_eq!(config.renderer.timeout_secs, 10);
        assert_eq!(config.renderer.mmdc_path, "mmdc");
        assert_eq!(config.diagram.width, 2000);
        assert_eq!(config.diagram.height, 1000);
        assert_eq!(config.spec_path(), Path::new("build/docs").join("android_app_specs.json"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.yaml");
        std::fs::write(&path, "renderer: [unclosed").unwrap();
        assert!(matches!(DocsConfig::from_file(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DocsConfig::default();
        config
            .apply_env_with(lookup(&[(RENDERER_ENV, "Kroki"), (KROKI_URL_ENV, "http://localhost:8000")]))
            .unwrap();
        assert_eq!(config.renderer.kind, RendererKind::Kroki);
        assert_eq!(config.renderer.kroki_url, "http://localhost:8000");
    }

    #[test]
    fn test_unknown_renderer() {
        let mut config = DocsConfig::default();
        let result = config.apply_env_with(lookup(&[(RENDERER_ENV, "graphviz")]));
        assert!(matches!(result, Err(ConfigError::UnknownRenderer(name)) if name == "graphviz"));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = DocsConfig::default();
        config.diagram.height = 0;
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidDimension { name, .. }) if name == "height")
        );
    }

    #[test]
    fn test_loader_reexported_at_crate_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.yaml");
        std::fs::write(&path, "renderer:\n  timeout_secs: 0\n").unwrap();

        let config: crate::implementations::config::DocsConfig = DocsConfig::from_file(&path).unwrap();
        assert_eq!(config.renderer.timeout_secs, 0);
        assert!(
            matches!(
                crate::implementations::config::DocsConfig::load(Some(path.as_path())),
                Err(ConfigError::InvalidTimeout)
            )
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = DocsConfig::default();
        config.renderer.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout)));

        config.renderer.timeout_secs = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = DocsConfig {
            output_dir: Some(PathBuf::from("out")),
            ..DocsConfig::default()
        };
        let absolute = dir.path().join("specs.json");
        assert_eq!(config.resolve(&absolute), absolute);
        assert_eq!(config.resolve(Path::new("specs.json")), Path::new("out").join("specs.json"));
    }
}
