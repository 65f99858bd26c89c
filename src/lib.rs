use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use binary_stream::{BitSequence, BitWriter};
pub use cli::CLIParser;
use document::Document;
pub use error::Error;
use huffman::{CodeTable, HuffmanCodec};
use spelling::SpellChecker;
use threadpool::ThreadPool;

pub mod binary_stream;
mod cli;
pub mod document;
mod error;
pub mod huffman;
mod logger;
pub mod spelling;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    dictionary_file: PathBuf,
    document_file: PathBuf,
    tolerance: usize,
    spell_check: bool,
    replacements: Vec<(String, String)>,
    deletions: Vec<String>,
    encoded_output_file: PathBuf,
    decoded_output_file: PathBuf,
    packed_output_file: Option<PathBuf>,
    number_of_threads: usize,
}

/// Outcome of coding the final sentence of a document.
pub struct CodingReport {
    pub sentence: String,
    pub code_table: CodeTable,
    pub encoded: BitSequence,
    pub decoded: String,
    pub original_size: usize,
    pub encoded_size: usize,
    pub compression_ratio: f64,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

fn read_input_file(file_path: &Path) -> Result<String> {
    let input_file = open_input_file(file_path)?;
    let mut content = String::new();
    BufReader::new(&input_file)
        .read_to_string(&mut content)
        .map_err(|e| Error::FailedToReadInput(file_path.display().to_string(), e))?;
    Ok(content)
}

fn write_output_file(file_path: &Path, content: &[u8]) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut writer = BufWriter::new(&output_file);
    writer
        .write_all(content)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::FailedToWriteOutput(file_path.display().to_string(), e))
}

fn write_packed_output_file(file_path: &Path, encoded: &BitSequence) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let mut output_file_writer = BufWriter::new(&output_file);
    let mut bit_writer = BitWriter::new(&mut output_file_writer);
    bit_writer
        .write_sequence(encoded)
        .and_then(|_| bit_writer.flush())
        .map_err(|e| Error::FailedToWriteOutput(file_path.display().to_string(), e))
}

fn spell_check_document(
    spell_checker: &Arc<SpellChecker>,
    document: &Document,
    arguments: &Arguments,
) {
    let words: Vec<String> = document.words().map(str::to_owned).collect();
    let pool = ThreadPool::new(arguments.number_of_threads.max(1));
    let results = spell_checker.check_all(&words, arguments.tolerance, &pool);
    for (word, suggestions) in words.iter().zip(results) {
        println!("Similar words to {}: {}", word, suggestions.join(" "));
    }
}

fn apply_edits(document: &mut Document, arguments: &Arguments) {
    for (old_word, new_word) in &arguments.replacements {
        match document.replace(old_word, new_word) {
            Ok(count) => log::info!("Replaced {} x '{}' by '{}'", count, old_word, new_word),
            Err(e) => log::warn!("Replacement skipped: {}", e),
        }
    }
    for word in &arguments.deletions {
        match document.delete(word) {
            Ok(()) => log::info!("Deleted last occurrence of '{}'", word),
            Err(e) => log::warn!("Deletion skipped: {}", e),
        }
    }
}

/// Huffman codes `sentence` with a tree built from its own frequencies.
pub fn code_sentence(sentence: &str) -> Result<CodingReport> {
    let codec = HuffmanCodec::from_text(sentence)?;
    logger::log_code_table(codec.code_table());
    let encoded = codec.encode(sentence)?;
    let decoded = codec.decode(&encoded)?;
    Ok(CodingReport {
        sentence: sentence.to_owned(),
        code_table: codec.code_table().clone(),
        original_size: huffman::original_size_in_bits(sentence),
        encoded_size: encoded.len(),
        compression_ratio: huffman::compression_ratio(&encoded, sentence),
        decoded,
        encoded,
    })
}

fn print_report(codec_report: &CodingReport) {
    println!("Generated Sentence: {}", codec_report.sentence);
    println!("Symbols with their codes:");
    for (symbol, code) in codec_report.code_table.iter() {
        println!("{:?} {}", symbol, code);
    }
    println!("Encoded Huffman data:\n{}", codec_report.encoded);
    println!("Decoded Huffman data:\n{}", codec_report.decoded);
    println!("Original Size (in bits): {}", codec_report.original_size);
    println!("Encoded Size (in bits): {}", codec_report.encoded_size);
    println!("Compression Ratio: {}", codec_report.compression_ratio);
}

pub fn run(arguments: &Arguments) -> Result<CodingReport> {
    let dictionary = read_input_file(&arguments.dictionary_file)?;
    let spell_checker = Arc::new(SpellChecker::from_text(&dictionary)?);

    let document_text = read_input_file(&arguments.document_file)?;
    let mut document: Document = document_text.split_whitespace().collect();
    log::info!("Document holds {} words", document.len());
    if arguments.spell_check {
        spell_check_document(&spell_checker, &document, arguments);
    }
    apply_edits(&mut document, arguments);

    let report = code_sentence(&document.sentence())?;
    print_report(&report);

    write_output_file(
        &arguments.encoded_output_file,
        report.encoded.to_string().as_bytes(),
    )?;
    write_output_file(&arguments.decoded_output_file, report.decoded.as_bytes())?;
    if let Some(packed_output_file) = &arguments.packed_output_file {
        write_packed_output_file(packed_output_file, &report.encoded)?;
    }
    Ok(report)
}
