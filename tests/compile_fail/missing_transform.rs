use tyseq::func::Transform;
use tyseq::{func, type_seq};

struct Widen;

impl Transform<u8> for Widen {
    type Output = u16;
}

fn main() {
    let _ = type_seq![u8, i8].apply(func::<Widen>());
}
