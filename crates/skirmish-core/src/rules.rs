//! Classic battle rules shared by the agent and the reference arena.

use crate::constants::*;

/// Bullet speed for a given power. Decreasing in power: 3.0 gives 11.
pub fn bullet_speed(power: f64) -> f64 {
    20.0 - 3.0 * clamp_power(power)
}

/// Damage dealt on hit.
pub fn bullet_damage(power: f64) -> f64 {
    let power = clamp_power(power);
    let mut damage = 4.0 * power;
    if power > 1.0 {
        damage += 2.0 * (power - 1.0);
    }
    damage
}

/// Energy the shooter regains when its bullet hits.
pub fn bullet_hit_bonus(power: f64) -> f64 {
    3.0 * clamp_power(power)
}

/// Heat added to the gun by firing.
pub fn gun_heat(power: f64) -> f64 {
    1.0 + clamp_power(power) / 5.0
}

/// Body turn limit at a given speed.
pub fn turn_rate(velocity: f64) -> f64 {
    (10.0 - 0.75 * velocity.abs()).to_radians()
}

pub fn clamp_power(power: f64) -> f64 {
    power.clamp(MIN_BULLET_POWER, MAX_BULLET_POWER)
}
