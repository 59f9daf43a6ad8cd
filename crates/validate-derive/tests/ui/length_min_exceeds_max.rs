//! A length range must not be empty.

use fieldcheck_validate_derive::Validatable;

#[derive(Validatable)]
struct Item {
    #[validate(length(min = 5, max = 2))]
    description: Option<String>,
}

fn main() {
    let item = Item { description: None };
    let _ = item.description;
}
