use tyseq::{index, type_seq};

fn main() {
    let _ = type_seq![u8].remove_range(index::<256>(), index::<256>());
}
