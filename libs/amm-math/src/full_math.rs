use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    u128_from_u256(env, &result)
}

/// Compare a * b against c * d without intermediate overflow
/// Returns true when the products are exactly equal
pub fn products_equal(env: &Env, a: u128, b: u128, c: u128, d: u128) -> bool {
    let left = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let right = U256::from_u128(env, c).mul(&U256::from_u128(env, d));
    left == right
}

/// Convert U256 to u128, panics if overflow
fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        panic!("U256 overflow when converting to u128");
    }
    value.to_u128().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        // 1 * 1 / 2 = 0 (rounds down)
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        // 3 * 1 / 2 = 1 (rounds down from 1.5)
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        // 5 * 1 / 3 = 1 (rounds down from 1.67)
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), 0);
        assert_eq!(mul_div(&env, 100, 0, 50), 0);
    }

    #[test]
    fn test_mul_div_phantom_overflow() {
        let env = Env::default();
        // a * b overflows u128 but the quotient fits
        let large = 1u128 << 100;
        assert_eq!(mul_div(&env, large, large, large), large);
    }

    #[test]
    fn test_mul_div_max_values() {
        let env = Env::default();
        let max = u128::MAX;
        assert_eq!(mul_div(&env, max, max, max), max);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "U256 overflow when converting to u128")]
    fn test_mul_div_result_too_large() {
        let env = Env::default();
        // MAX * MAX / 1 does not fit back into u128
        mul_div(&env, u128::MAX, u128::MAX, 1);
    }

    // === products_equal tests ===

    #[test]
    fn test_products_equal_basic() {
        let env = Env::default();
        // 2 * 6 == 3 * 4
        assert!(products_equal(&env, 2, 6, 3, 4));
        // 2 * 6 != 3 * 5
        assert!(!products_equal(&env, 2, 6, 3, 5));
    }

    #[test]
    fn test_products_equal_zero() {
        let env = Env::default();
        assert!(products_equal(&env, 0, 100, 0, 7));
        assert!(!products_equal(&env, 0, 100, 1, 7));
    }

    #[test]
    fn test_products_equal_no_overflow() {
        let env = Env::default();
        // both products overflow u128 yet compare exactly
        let big = u128::MAX;
        assert!(products_equal(&env, big, big, big, big));
        assert!(!products_equal(&env, big, big, big, big - 1));
    }
}
