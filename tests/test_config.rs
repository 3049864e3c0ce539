use textregions::detection::{DetectorConfig, KernelSize};

#[test]
fn kernel_size_parses_width_by_height() {
    let kernel: KernelSize = "24x4".parse().unwrap();
    assert_eq!(kernel, KernelSize::new(24, 4));
}

#[test]
fn kernel_size_rejects_malformed_input() {
    assert!("24".parse::<KernelSize>().is_err());
    assert!("x4".parse::<KernelSize>().is_err());
    assert!("24x".parse::<KernelSize>().is_err());
    assert!("0x4".parse::<KernelSize>().is_err());
    assert!("24xfour".parse::<KernelSize>().is_err());
}

#[test]
fn default_config_values() {
    let config = DetectorConfig::default();
    assert_eq!(config.merge_kernel, KernelSize::new(24, 4));
    assert_eq!(config.prune_kernel, KernelSize::new(30, 9));
    assert_eq!(config.min_area, 700.0);
    assert_eq!(config.max_height_ratio, 0.9);
    assert_eq!(config.target_width, 1000);
}
