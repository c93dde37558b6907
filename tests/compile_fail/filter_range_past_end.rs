use tyseq::func::IsSame;
use tyseq::{func, index, type_seq};

fn main() {
    let _ = type_seq![u8, u16].filter_range(index::<0>(), index::<3>(), func::<IsSame<u8>>());
}
