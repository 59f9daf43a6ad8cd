//! A field may declare each constraint kind once.

use fieldcheck_validate_derive::Validatable;

#[derive(Validatable)]
struct Gamer {
    #[validate(min = 1, min = 2)]
    age: i32,
}

fn main() {
    let gamer = Gamer { age: 1 };
    let _ = gamer.age;
}
