// Pattern: Operator Traits
// `+`, `==` and `[]` on user types come from Add, PartialEq and
// Index/IndexMut.

use crate::console::Console;
use std::ops::{Add, Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Debug, Default)]
pub struct Array10 {
    data: [i32; 10],
}

impl Array10 {
    pub fn get(&self, index: usize) -> Option<&i32> {
        self.data.get(index)
    }
}

impl Index<usize> for Array10 {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Array10 {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        &mut self.data[index]
    }
}

fn equality(a: Vector2, b: Vector2) -> &'static str {
    if a == b {
        "equal"
    } else {
        "not equal"
    }
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Operator traits")?;

    let v1 = Vector2::new(2, 3);
    let v2 = Vector2::new(4, 5);
    let v3 = v1 + v2;
    say!(console, "v3: x = {}, y = {}", v3.x, v3.y);
    say!(console, "v1 and v2 are {}", equality(v1, v2));

    let v4 = Vector2::new(2, 3);
    let v5 = Vector2::new(2, 3);
    say!(console, "v4 and v5 are {}", equality(v4, v5));

    let mut arr = Array10::default();
    arr[3] = 44;
    say!(console, "arr[3] = {}", arr[3]);
    say!(console, "arr.get(12) = {:?}", arr.get(12));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_eq() {
        assert_eq!(Vector2::new(2, 3) + Vector2::new(4, 5), Vector2::new(6, 8));
        assert_ne!(Vector2::new(2, 3), Vector2::new(4, 5));
    }

    #[test]
    fn test_index() {
        let mut arr = Array10::default();
        arr[9] = 7;
        assert_eq!(arr[9], 7);
        assert_eq!(arr.get(10), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let arr = Array10::default();
        let index = std::hint::black_box(10);
        let _value = arr[index];
    }
}
