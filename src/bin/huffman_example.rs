use lexicode::binary_stream::BitWriter;
use lexicode::huffman::{compression_ratio, HuffmanCodec};
use lexicode::spelling::SpellChecker;
use lexicode::Error;

fn main() -> Result<(), Error> {
    let text = "she sells sea shells by the sea shore";

    let codec = HuffmanCodec::from_text(text)?;
    println!("code table");
    for (symbol, code) in codec.code_table().iter() {
        println!("{:?} {}", symbol, code);
    }

    let encoded = codec.encode(text)?;
    println!("encoded sequence\n{}", encoded);

    let mut packed: Vec<u8> = Vec::new();
    let mut writer = BitWriter::new(&mut packed);
    let _ = writer.write_sequence(&encoded).and_then(|_| writer.flush());
    println!("packed sequence\n{:?}", packed);

    let decoded = codec.decode(&encoded)?;
    println!("decoded sequence\n{}", decoded);
    println!("compression ratio {}", compression_ratio(&encoded, text));

    let spell_checker = SpellChecker::from_text(text)?;
    for word in ["shels", "se", "shore"] {
        println!("similar to {}: {:?}", word, spell_checker.spell_check(word));
    }
    Ok(())
}
