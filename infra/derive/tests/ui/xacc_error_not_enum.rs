use xacc_derive::xacc_error;

#[xacc_error]
pub struct DemoError {
    message: String,
}

fn main() {}
