use approx::assert_relative_eq;
use buoyancy2d::{
    BuoyancyError, BuoyancyInput, BuoyancyStatus, FLUID_PRESETS, MATERIAL_PRESETS, calculate,
};

const VOLUME: f32 = 0.1;
const GRAVITY: f32 = 9.81;

fn densities() -> impl Iterator<Item = (f32, f32)> {
    let objects = (1..=80).map(|i| i as f32 * 100.0);
    objects.flat_map(|o| (10..=40).map(move |l| (o, l as f32 * 50.0)))
}

#[test]
fn weight_is_density_times_volume_times_gravity() {
    for (object, fluid) in densities() {
        let result = calculate(&BuoyancyInput::new(object, fluid, VOLUME, GRAVITY)).unwrap();
        assert_eq!(result.weight, object * VOLUME * GRAVITY);
    }
}

#[test]
fn regimes_follow_density_ratio() {
    for (object, fluid) in densities() {
        let result = calculate(&BuoyancyInput::new(object, fluid, VOLUME, GRAVITY)).unwrap();
        assert_eq!(result.net_force, result.weight - result.buoyant_force);

        if object > fluid {
            assert_eq!(result.submerged_fraction, 1.0);
            assert!(result.is_sinking);
            assert_eq!(result.buoyant_force, fluid * VOLUME * GRAVITY);
            assert!(result.net_force > 0.0);
            assert_eq!(result.status(), BuoyancyStatus::Sinking);
        } else if object == fluid {
            assert_eq!(result.submerged_fraction, 1.0);
            assert!(!result.is_sinking);
            assert_eq!(result.buoyant_force, result.weight);
            assert_eq!(result.net_force, 0.0);
            assert_eq!(result.status(), BuoyancyStatus::Neutral);
        } else {
            assert_eq!(result.submerged_fraction, object / fluid);
            assert!(result.submerged_fraction > 0.0 && result.submerged_fraction < 1.0);
            assert!(!result.is_sinking);
            assert_eq!(result.buoyant_force, result.weight);
            assert_eq!(result.net_force, 0.0);
            assert_eq!(result.status(), BuoyancyStatus::Floating);
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let input = BuoyancyInput::new(917.0, 1025.0, VOLUME, GRAVITY);
    let first = calculate(&input).unwrap();
    for _ in 0..10 {
        assert_eq!(calculate(&input).unwrap(), first);
    }
}

#[test]
fn wood_in_water_floats() {
    let result = calculate(&BuoyancyInput::new(800.0, 1000.0, VOLUME, GRAVITY)).unwrap();
    assert_relative_eq!(result.weight, 784.8, max_relative = 1e-6);
    assert_relative_eq!(result.density_ratio, 0.8, max_relative = 1e-6);
    assert_relative_eq!(result.submerged_fraction, 0.8, max_relative = 1e-6);
    assert_relative_eq!(result.buoyant_force, 784.8, max_relative = 1e-6);
    assert_eq!(result.net_force, 0.0);
    assert!(!result.is_sinking);
}

#[test]
fn iron_in_water_sinks() {
    let result = calculate(&BuoyancyInput::new(7870.0, 1000.0, VOLUME, GRAVITY)).unwrap();
    assert_relative_eq!(result.weight, 7720.47, max_relative = 1e-5);
    assert_relative_eq!(result.density_ratio, 7.87, max_relative = 1e-6);
    assert_eq!(result.submerged_fraction, 1.0);
    assert_relative_eq!(result.buoyant_force, 981.0, max_relative = 1e-6);
    assert_relative_eq!(result.net_force, 6739.47, max_relative = 1e-5);
    assert!(result.is_sinking);
}

#[test]
fn water_block_in_water_is_neutral() {
    let result = calculate(&BuoyancyInput::new(1000.0, 1000.0, VOLUME, GRAVITY)).unwrap();
    assert_eq!(result.submerged_fraction, 1.0);
    assert_eq!(result.net_force, 0.0);
    assert!(!result.is_sinking);
    assert_eq!(result.status(), BuoyancyStatus::Neutral);
}

#[test]
fn every_material_floats_on_mercury() {
    let mercury = FLUID_PRESETS.iter().find(|p| p.label == "Mercury").unwrap();
    for material in MATERIAL_PRESETS.iter() {
        let input = BuoyancyInput::new(material.density, mercury.density, VOLUME, GRAVITY);
        let result = calculate(&input).unwrap();
        assert_eq!(result.status(), BuoyancyStatus::Floating, "{}", material.label);
    }
}

#[test]
fn zero_fluid_density_is_a_domain_error() {
    let err = calculate(&BuoyancyInput::new(800.0, 0.0, VOLUME, GRAVITY)).unwrap_err();
    assert_eq!(err, BuoyancyError::NonPositiveFluidDensity(0.0));
    assert!(err.to_string().contains("fluid density"));
}
