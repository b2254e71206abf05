use soroban_sdk::{Env, U256};

/// Integer square root over a 256-bit operand (rounds down)
///
/// Newton/Babylonian iteration restricted to integers: starts above the
/// root and descends monotonically, so the loop exit yields exactly
/// floor(sqrt(n)). No floating point anywhere, results are bit-for-bit
/// reproducible.
pub fn integer_sqrt(env: &Env, n: &U256) -> u128 {
    let one = U256::from_u32(env, 1);
    let two = U256::from_u32(env, 2);

    if n.lt(&two) {
        // 0 or 1 is its own root
        return n.to_u128().unwrap();
    }

    let mut x = n.clone();
    let mut y = n.add(&one).div(&two);
    while y.lt(&x) {
        x = y;
        y = x.add(&n.div(&x)).div(&two);
    }

    // the floor root of a 256-bit value always fits in 128 bits
    x.to_u128().unwrap()
}

/// floor(sqrt(a * b)) with the product widened to 256 bits first
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> u128 {
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    integer_sqrt(env, &product)
}
