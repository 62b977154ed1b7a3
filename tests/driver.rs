//! End-to-end scenarios over the public API of the `Vector`.

use contigo::failure::Failure;
use contigo::vector::{self, Vector};

#[test]
fn constructors() {
    let v1: Vector<i32> = Vector::new();
    assert!(v1.is_empty());
    assert_eq!(0, v1.len());
    assert_eq!(0, v1.capacity());

    let v2 = Vector::from_elem(5, 42);
    assert_eq!(5, v2.len());
    assert!(v2.capacity() >= 5);
    assert!(v2.iter().all(|&e| e == 42));

    let mut v3 = v2.clone();
    assert_eq!(v2, v3);

    let v4 = v3.take();
    assert_eq!(5, v4.len());
    assert!(v3.is_empty());

    let v5 = contigo::vector![1, 2, 3, 4, 5];
    assert_eq!(5, v5.len());

    assert!(v5.iter().copied().eq(1..=5));

    let v6: Vector<u8> = Vector::with_len(3);
    assert_eq!(v6, [0, 0, 0]);
}

#[test]
fn element_access() {
    let v = contigo::vector![10, 20, 30, 40, 50];

    assert_eq!(10, v[0]);
    assert_eq!(50, v[4]);

    assert_eq!(Ok(&10), v.at(0));
    assert_eq!(Ok(&50), v.at(4));
    assert_eq!(Err(Failure::OutOfRange { position: 10, length: 5 }), v.at(10));

    assert_eq!(10, *v.front());
    assert_eq!(50, *v.back());

    assert_eq!(10, unsafe { *v.as_ptr() });
}

#[test]
fn iterators() {
    let mut v = contigo::vector![1, 2, 3, 4, 5];

    assert!(v.iter().copied().eq(1..=5));
    assert!(v.iter().zip(1..).all(|(e, expected)| *e == expected));
    assert!(v.iter_rev().copied().eq((1..=5).rev()));

    for e in &mut v {
        *e *= 2;
    }

    assert_eq!(v, [2, 4, 6, 8, 10]);

    let owned: Vec<i32> = v.into_iter().collect();
    assert_eq!(vec![2, 4, 6, 8, 10], owned);
}

#[test]
fn capacity() {
    let mut v = Vector::new();
    assert!(v.is_empty());

    v.push(1);
    assert!(!v.is_empty());
    assert_eq!(1, v.len());

    v.reserve(100);
    assert_eq!(100, v.capacity());
    assert_eq!(1, v.len());

    v.resize(5, 42);
    assert_eq!(5, v.len());
    assert_eq!(42, v[1]);
    assert_eq!(42, v[4]);

    v.resize_default(3);
    assert_eq!(v, [1, 42, 42]);

    v.shrink_to_fit();
    assert_eq!(3, v.capacity());
}

#[test]
fn modifiers() {
    let mut v = Vector::new();

    for i in 1..=5 {
        v.push(i);
    }
    assert_eq!(5, v.len());

    assert_eq!(Some(5), v.pop());
    assert_eq!(4, v.len());
    assert_eq!(4, *v.back());

    assert_eq!(99, *v.insert(2, 99));
    assert_eq!(99, v[2]);
    assert_eq!(5, v.len());

    v.insert_n(0, 3, 88);
    assert_eq!(8, v.len());
    assert_eq!(&[88, 88, 88], &v[..3]);

    assert_eq!(Some(&mut 88), v.erase(0));
    assert_eq!(7, v.len());

    v.erase_range(0..2);
    assert_eq!(5, v.len());
    assert_eq!(v, [1, 2, 99, 3, 4]);

    v.clear();
    assert!(v.is_empty());
}

#[test]
fn emplace() {
    let mut v: Vector<String> = Vector::new();

    v.emplace_back(|| String::from("Hello"));
    v.emplace_back(|| "A".repeat(5));

    assert_eq!(2, v.len());
    assert_eq!("Hello", v[0]);
    assert_eq!("AAAAA", v[1]);

    assert_eq!("World", *v.emplace(1, || String::from("World")));
    assert_eq!("World", v[1]);
    assert_eq!(3, v.len());
}

#[test]
fn assignment() {
    let v1 = contigo::vector![1, 2, 3, 4, 5];
    let mut v2 = Vector::new();

    v2.clone_from(&v1);
    assert_eq!(v1, v2);

    let mut v3 = Vector::new();
    assert!(v3.is_empty());

    v3 = v2.take();
    assert_eq!(5, v3.len());
    assert!(v2.is_empty());

    v3.assign([10, 20, 30]);
    assert_eq!(v3, [10, 20, 30]);
}

#[test]
fn comparison() {
    let v1 = contigo::vector![1, 2, 3];
    let v2 = contigo::vector![1, 2, 3];
    let v3 = contigo::vector![1, 2, 4];
    let v4 = contigo::vector![1, 2];

    assert!(v1 == v2);
    assert!(v1 != v3);

    assert!(v1 < v3);
    assert!(v4 < v1);
    assert!(v3 > v1);
    assert!(v1 > v4);
    assert!(v1 <= v2);
    assert!(v1 >= v2);
}

#[test]
fn swap() {
    let mut v1 = contigo::vector![1, 2, 3];
    let mut v2 = contigo::vector![4, 5, 6, 7];

    v1.swap_with(&mut v2);

    assert_eq!(4, v1.len());
    assert_eq!(3, v2.len());
    assert_eq!(4, v1[0]);
    assert_eq!(1, v2[0]);

    vector::swap(&mut v1, &mut v2);

    assert_eq!(v1, [1, 2, 3]);
    assert_eq!(v2, [4, 5, 6, 7]);
}
