use tyseq::func::ToOption;
use tyseq::{func, index, type_seq};

fn main() {
    let _ = type_seq![u8].apply_at(index::<1>(), func::<ToOption>());
}
