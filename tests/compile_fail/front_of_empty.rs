use tyseq::type_seq;

fn main() {
    let _ = type_seq![].front();
}
