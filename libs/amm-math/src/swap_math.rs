use crate::full_math::mul_div;
use soroban_sdk::Env;

/// Zero-fee constant-product pricing
///
/// Returns floor(amount_in * reserve_out / (reserve_in + amount_in)).
/// The floor keeps reserve_in * reserve_out from ever decreasing across
/// a swap: rounding error stays with the pool, the trader never receives
/// more than the exact formula yields.
pub fn constant_product_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> u128 {
    let denominator = match reserve_in.checked_add(amount_in) {
        Some(d) => d,
        None => panic!("Reserve overflow"),
    };
    mul_div(env, amount_in, reserve_out, denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_constant_product_out_reference_vector() {
        let env = Env::default();
        // floor(25 * 100 / 125) = 20
        assert_eq!(constant_product_out(&env, 25, 100, 100), 20);
    }

    #[test]
    fn test_constant_product_out_floors() {
        let env = Env::default();
        // 10 * 100 / 110 = 9.09... -> 9
        assert_eq!(constant_product_out(&env, 10, 100, 100), 9);
        // 1 * 3 / 101 -> 0
        assert_eq!(constant_product_out(&env, 1, 100, 3), 0);
    }

    #[test]
    fn test_constant_product_out_zero_input() {
        let env = Env::default();
        assert_eq!(constant_product_out(&env, 0, 100, 100), 0);
    }

    #[test]
    fn test_constant_product_out_empty_out_side() {
        let env = Env::default();
        // nothing on the out side, trade prices to zero
        assert_eq!(constant_product_out(&env, 25, 100, 0), 0);
    }

    #[test]
    fn test_constant_product_preserves_k() {
        let env = Env::default();
        let (mut r_in, mut r_out) = (100u128, 100u128);
        let k_before = r_in * r_out;
        for amount_in in [7u128, 25, 1, 64] {
            let out = constant_product_out(&env, amount_in, r_in, r_out);
            r_in += amount_in;
            r_out -= out;
            assert!(r_in * r_out >= k_before);
        }
    }

    #[test]
    fn test_constant_product_out_large_reserves() {
        let env = Env::default();
        // amount_in * reserve_out overflows u128; U256 intermediate handles it
        let big = 1u128 << 120;
        let out = constant_product_out(&env, big, big, big);
        // in == reserve_in halves the out side (floor)
        assert_eq!(out, big / 2);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_constant_product_out_no_liquidity_no_input() {
        let env = Env::default();
        constant_product_out(&env, 0, 0, 100);
    }
}
