//! Fields need names for error messages.

use fieldcheck_validate_derive::Validatable;

#[derive(Validatable)]
struct Pair(i32);

fn main() {
    let pair = Pair(1);
    let _ = pair.0;
}
