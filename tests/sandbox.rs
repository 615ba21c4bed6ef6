/*
    The sandbox
*/

use arbnum::*;

fn larger<N: Number>(x: N, y: N) -> N {
    if x.greater_or_equal(&y) {
        x
    } else {
        y
    }
}

#[test]
fn sandbox() {
    let a = BigInt::from(2);
    let b = BigInt::from(3);
    assert!(larger(a, b).equals(&BigInt::from(3)));

    let x = BigFloat::try_from(2.5).unwrap();
    let y = BigFloat::try_from(-2.5).unwrap();
    assert!(larger(x.clone(), y).equals(&x));

    let p = BigRat::new(1, 3).unwrap();
    let q = BigRat::new(1, 2).unwrap();
    assert!(larger(p, q.clone()).equals(&q));

    assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
}
