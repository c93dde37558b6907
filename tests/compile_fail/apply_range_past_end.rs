use tyseq::func::ToOption;
use tyseq::{func, index, type_seq};

fn main() {
    let _ = type_seq![u8, u16].apply_range(index::<1>(), index::<3>(), func::<ToOption>());
}
