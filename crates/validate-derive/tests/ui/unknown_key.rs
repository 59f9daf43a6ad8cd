//! Only known constraint keys are accepted.

use fieldcheck_validate_derive::Validatable;

#[derive(Validatable)]
struct Item {
    #[validate(pattern = "x")]
    title: Option<String>,
}

fn main() {
    let item = Item { title: None };
    let _ = item.title;
}
