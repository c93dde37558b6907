use tyseq::type_seq;

fn main() {
    let empty = type_seq![u8].pop_back();
    let _ = empty.back();
}
