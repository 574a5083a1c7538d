//! Compile-time bound propagation checks.
//!
//! Each function signature here is itself the assertion: it only compiles if
//! the operator produces exactly the written output bounds. The bodies are
//! then run to check the values as well.
#![feature(generic_const_exprs)]
#![allow(incomplete_features)]

use ranged_integer::{integer_range, max, min, Ranged};

fn sum(a: Ranged<-5, 10>, b: Ranged<3, 7>) -> Ranged<-2, 17> {
    a + b
}

fn difference(a: Ranged<-5, 10>, b: Ranged<3, 7>) -> Ranged<-12, 7> {
    a - b
}

fn product_mixed_signs(a: Ranged<-50, 100>, b: Ranged<-10, 20>) -> Ranged<-1000, 2000> {
    a * b
}

fn product_both_negative(a: Ranged<-100, -50>, b: Ranged<-20, -10>) -> Ranged<500, 2000> {
    a * b
}

fn quotient(a: Ranged<10, 100>, b: Ranged<2, 5>) -> Ranged<2, 50> {
    a / b
}

fn quotient_divisor_spans_zero(a: Ranged<10, 100>, b: Ranged<-5, 5>) -> Ranged<-100, 100> {
    a / b
}

fn quotient_divisor_zero_endpoint(a: Ranged<10, 100>, b: Ranged<1, 5>) -> Ranged<2, 100> {
    // The divisor interval [0, 5] is accepted; only the value 0 panics.
    let b: Ranged<0, 5> = b.expand();
    a / b
}

fn remainder(a: Ranged<0, 1000>, b: Ranged<3, 3>) -> Ranged<0, 2> {
    a % b
}

fn remainder_signed(a: Ranged<-10, 10>, b: Ranged<-3, 3>) -> Ranged<-2, 2> {
    a % b
}

fn shifted_left(a: Ranged<1, 4>, b: Ranged<0, 3>) -> Ranged<1, 32> {
    a << b
}

fn shifted_right(a: Ranged<16, 64>, b: Ranged<1, 3>) -> Ranged<2, 32> {
    a >> b
}

fn masked(a: Ranged<0, 255>, b: Ranged<0, 15>) -> Ranged<0, 15> {
    a & b
}

fn negated(a: Ranged<-3, 25>) -> Ranged<-25, 3> {
    -a
}

fn magnitude(a: Ranged<-50, 10>) -> Ranged<0, 50> {
    a.abs()
}

fn smaller(a: Ranged<0, 10>, b: Ranged<-5, 7>) -> Ranged<-5, 7> {
    min(a, b)
}

fn larger(a: Ranged<0, 10>, b: Ranged<-5, 7>) -> Ranged<0, 10> {
    max(a, b)
}

fn r<const MIN: i128, const MAX: i128>(n: i128) -> Ranged<MIN, MAX> {
    Ranged::new(n).unwrap()
}

#[test]
fn additive_values() {
    assert_eq!(sum(r(-5), r(3)), -2);
    assert_eq!(sum(r(10), r(7)), 17);
    assert_eq!(difference(r(-5), r(7)), -12);
    assert_eq!(difference(r(10), r(3)), 7);
}

#[test]
fn multiplicative_values() {
    assert_eq!(product_mixed_signs(r(-50), r(20)), -1000);
    assert_eq!(product_mixed_signs(r(100), r(20)), 2000);
    assert_eq!(product_both_negative(r(-100), r(-20)), 2000);
    assert_eq!(quotient(r(100), r(2)), 50);
    assert_eq!(quotient_divisor_spans_zero(r(100), r(-1)), -100);
    assert_eq!(quotient_divisor_zero_endpoint(r(10), r(5)), 2);
}

#[test]
fn remainder_values() {
    assert_eq!(remainder(r(10), r(3)), 1);
    assert_eq!(remainder(r(999), r(3)), 0);
    assert_eq!(remainder_signed(r(-10), r(3)), -1);
    assert_eq!(remainder_signed(r(10), r(-3)), 1);
}

#[test]
fn remainder_of_extreme_dividend() {
    // i128::MIN % -1 wraps in primitive arithmetic; its true remainder is 0.
    let a: Ranged<{ i128::MIN }, { i128::MIN }> = Ranged::MIN;
    let b: Ranged<-1, -1> = Ranged::MIN;
    let zero: Ranged<0, 0> = a % b;
    assert_eq!(zero, 0);
}

#[test]
fn bitwise_values() {
    assert_eq!(shifted_left(r(1), r(3)), 8);
    assert_eq!(shifted_right(r(64), r(1)), 32);
    assert_eq!(masked(r(0xff), r(0x0c)), 0x0c);
}

#[test]
fn unary_values() {
    assert_eq!(negated(r(25)), -25);
    assert_eq!(negated(r(-3)), 3);
    assert_eq!(magnitude(r(-50)), 50);
    assert_eq!(magnitude(r(10)), 10);
}

#[test]
fn minmax_values() {
    assert_eq!(smaller(r(3), r(7)), 3);
    assert_eq!(smaller(r(3), r(-5)), -5);
    assert_eq!(larger(r(3), r(7)), 7);
    assert_eq!(larger(r(10), r(-5)), 10);
}

#[test]
fn chained_propagation() {
    // (hours * 60 + minutes) * 60 + seconds covers exactly a day in seconds.
    let hours: Ranged<0, 23> = r(13);
    let minutes: Ranged<0, 59> = r(37);
    let seconds: Ranged<0, 59> = r(11);
    let sixty = ranged_integer::constant::<60>();
    let of_day: Ranged<0, 86399> = (hours * sixty + minutes) * sixty + seconds;
    assert_eq!(of_day, 13 * 3600 + 37 * 60 + 11);
}

#[test]
fn mixed_arithmetic_is_plain() {
    let n: Ranged<0, 10> = r(4);
    let a: i128 = n + 100;
    let b: i128 = 100 - n;
    assert_eq!(a, 104);
    assert_eq!(b, 96);
}

#[test]
fn whole_day_iterates() {
    let hours = integer_range(Ranged::<0, 23>::MIN, Ranged::<0, 23>::MAX);
    assert_eq!(hours.count(), 23);
}
