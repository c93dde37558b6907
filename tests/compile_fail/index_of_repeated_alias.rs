use tyseq::query::{Positions, Unique};
use tyseq::seq::Sequence;
use tyseq::TypeSeq;

type Repeated = TypeSeq![u8, u16, u8];

const INDEX: usize = <Positions<<Repeated as Sequence>::List, u8> as Unique>::INDEX;

fn main() {
    let _ = INDEX;
}
