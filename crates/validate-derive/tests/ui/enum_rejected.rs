//! Only structs can derive the validator.

use fieldcheck_validate_derive::Validatable;

#[derive(Validatable)]
enum Mode { Fast }

fn main() {
    let _ = Mode::Fast;
}
