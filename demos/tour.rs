//! A tour of the `Vector`.
//!
//! The trace events emitted on each relocation of the storage are printed along the way.

use std::fmt::Display;

use contigo::vector::Vector;
use tracing::Level;

fn show<T: Display>(label: &str, vec: &Vector<T>) {
    let elements: Vec<String> = vec.iter().map(|e| e.to_string()).collect();

    println!("{label}: [{}]", elements.join(", "));
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .init();

    println!("=== Construction ===");

    let mut v1: Vector<i32> = Vector::new();
    let v2 = Vector::from_elem(5, 10);
    let v3 = contigo::vector![1, 2, 3, 4, 5];

    println!("v1 len: {}", v1.len());
    println!("v2 len: {}, first element: {}", v2.len(), v2[0]);
    show("v3", &v3);

    println!("\n=== Push and pop ===");

    v1.push(100);
    v1.push(200);
    v1.push(300);
    show("v1 after push", &v1);

    v1.pop();
    show("v1 after pop", &v1);

    println!("\n=== Insert and erase ===");

    v1.insert(1, 150);
    show("v1 after inserting 150 at 1", &v1);

    v1.erase(0);
    show("v1 after erasing the first element", &v1);

    println!("\n=== Capacity ===");

    println!("v1 len: {}, capacity: {}", v1.len(), v1.capacity());

    v1.reserve(20);
    println!("v1 after reserve(20), len: {}, capacity: {}", v1.len(), v1.capacity());

    v1.resize(5, 999);
    show("v1 after resize(5, 999)", &v1);

    println!("\n=== Strings ===");

    let mut words: Vector<String> = Vector::new();
    words.emplace_back(|| "Hello".to_string());
    words.emplace_back(|| "World".to_string());
    words.push("from".to_string());
    words.push("contigo".to_string());

    show("words", &words);

    let reversed: Vec<&str> = words.iter_rev().map(String::as_str).collect();
    println!("reversed: [{}]", reversed.join(", "));

    println!("\n=== Comparisons ===");

    let a = contigo::vector![1, 2, 3];
    let b = contigo::vector![1, 2, 3];
    let c = contigo::vector![1, 2, 4];

    println!("a == b: {}", a == b);
    println!("a == c: {}", a == c);
    println!("a < c: {}", a < c);

    println!("\n=== Swap ===");

    let mut x = contigo::vector![10, 20];
    let mut y = contigo::vector![30, 40, 50];

    show("x before swap", &x);
    show("y before swap", &y);

    x.swap_with(&mut y);

    show("x after swap", &x);
    show("y after swap", &y);

    println!("\n=== Done ===");
}
