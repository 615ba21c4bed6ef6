use arbnum::{BigInt, BigRat, Error, Number};

#[test]
fn construction() {
    assert!(BigRat::zero().is_zero());
    assert!(BigRat::default().is_zero());
    assert!(BigRat::new(0, 5).unwrap().is_zero(), "0/5 reduces to 0/1");
    assert_eq!(BigRat::new(1, 0), Err(Error::ZeroDenominator));
}

#[test]
fn canonical_form() {
    // always lowest terms with a positive denominator
    let r = BigRat::new(2, -4).unwrap();
    assert!(r.numer().equals(&BigInt::from(-1)));
    assert!(r.denom().equals(&BigInt::from(2)));

    let r = BigRat::new(6, 3).unwrap();
    assert!(r.numer().equals(&BigInt::from(2)));
    assert!(r.denom().equals(&BigInt::from(1)));

    assert!(BigRat::zero().denom().equals(&BigInt::from(1)));
}

#[test]
fn comparisons() {
    let third = BigRat::new(1, 3).unwrap();
    let half = BigRat::new(1, 2).unwrap();
    let neg = BigRat::new(-7, 2).unwrap();

    assert!(third.less_than(&half), "1/3 < 1/2");
    assert!(half.greater_than(&neg));
    assert!(third.equals(&BigRat::new(2, 6).unwrap()), "2/6 == 1/3");
    assert!(neg.less_or_equal(&neg.clone()));
    assert!(neg < third && third < half, "std comparison agrees");
}

#[test]
fn arithmetic() {
    let third = BigRat::new(1, 3).unwrap();
    let sixth = BigRat::new(1, 6).unwrap();

    let sum = third.add(&sixth);
    assert!(sum.equals(&BigRat::new(1, 2).unwrap()), "1/3 + 1/6 == 1/2");
    assert!(sum.numer().equals(&BigInt::from(1)));
    assert!(sum.denom().equals(&BigInt::from(2)));

    assert!(third.sub(&sixth).equals(&sixth), "1/3 - 1/6 == 1/6");
    assert!(third.mul(&sixth).equals(&BigRat::new(1, 18).unwrap()));
    assert!(BigRat::new(-1, 2).unwrap().abs().equals(&BigRat::new(1, 2).unwrap()));

    let q = BigRat::new(1, 2).unwrap().div(&BigRat::new(1, 4).unwrap());
    assert!(q.unwrap().equals(&BigRat::new(2, 1).unwrap()));
    assert_eq!(
        BigRat::new(1, 2).unwrap().div(&BigRat::zero()),
        Err(Error::DivisionByZero)
    );
}

#[test]
fn inversion() {
    let r = BigRat::new(2, 3).unwrap();
    assert!(r.invert().unwrap().equals(&BigRat::new(3, 2).unwrap()));
    assert_eq!(BigRat::zero().invert(), Err(Error::DivisionByZero));

    // a * (1/a) reduces to 1/1
    let one = BigRat::new(1, 1).unwrap();
    for (n, d) in [(1i64, 3i64), (-2, 5), (7, 2), (-9, -12)] {
        let a = BigRat::new(n, d).unwrap();
        let product = a.mul(&a.invert().unwrap());
        assert!(product.equals(&one), "{}/{} times its inverse", n, d);
        assert!(product.denom().equals(&BigInt::from(1)));
    }
}
