use bitread::{
    BitReadError, BitReader, LsbExtractor, ReverseBitReader, read_bits, read_bits_checked,
    required_bits, required_bits_signed, zigzag_encode,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A sensor record as a schema layer would describe it.
struct Reading {
    sensor_id: u32,
    temperature: i32,
    samples: u32,
    flags: u32,
}

const SENSOR_ID_BITS: u32 = 10;
const SAMPLES_BITS: u32 = 12;
const FLAGS_BITS: u32 = 3;

fn main() -> Result<(), BitReadError> {
    setup_logging("bitread=debug");

    println!("=== Bit Reading Examples ===\n");

    let temperature_bits = required_bits_signed(-40, 85);
    let record_bits = SENSOR_ID_BITS + temperature_bits + SAMPLES_BITS + FLAGS_BITS;
    println!(
        "Record layout: id {} + temperature {} + samples {} + flags {} = {} bits\n",
        SENSOR_ID_BITS, temperature_bits, SAMPLES_BITS, FLAGS_BITS, record_bits
    );

    let readings = [(513, -12, 4000, 0b101), (7, 23, 17, 0b010), (1023, -40, 0, 0b111)];
    let mut writer = BitWriter::default();
    for &(id, temperature, samples, flags) in &readings {
        writer.push(id, SENSOR_ID_BITS);
        writer.push(zigzag_encode(temperature as i32), temperature_bits);
        writer.push(samples, SAMPLES_BITS);
        writer.push(flags, FLAGS_BITS);
    }
    let total_bits = writer.len_bits;
    let buf = writer.finish();
    println!("Packed {} records into {} bytes\n", readings.len(), buf.len());

    example_forward(&buf, temperature_bits, readings.len());
    example_reverse(&buf, temperature_bits, total_bits);
    example_random_access(&buf, record_bits)?;
    example_widths();

    Ok(())
}

fn example_forward(buf: &[u8], temperature_bits: u32, count: usize) {
    println!("Example 1: Forward cursor");

    let mut reader = BitReader::with_extractor(buf, 0, LsbExtractor::detect());
    for _ in 0..count {
        let reading = Reading {
            sensor_id: reader.read_next_bits(SENSOR_ID_BITS),
            temperature: reader.read_next_signed(temperature_bits),
            samples: reader.read_next_bits(SAMPLES_BITS),
            flags: reader.read_next_bits(FLAGS_BITS),
        };
        println!(
            "  id {:>4}  {:>4} degrees  {:>4} samples  flags {:03b}",
            reading.sensor_id, reading.temperature, reading.samples, reading.flags
        );
    }
    println!("  Stopped at bit {}\n", reader.bit_offset());
}

fn example_reverse(buf: &[u8], temperature_bits: u32, total_bits: usize) {
    println!("Example 2: Reverse cursor from the end of the stream");

    let mut reader = ReverseBitReader::new(buf, total_bits);
    let flags = reader.read_previous_bits(FLAGS_BITS);
    let samples = reader.read_previous_bits(SAMPLES_BITS);
    let temperature = reader.read_previous_signed(temperature_bits);
    let sensor_id = reader.read_previous_bits(SENSOR_ID_BITS);
    println!(
        "  Last record: id {}, {} degrees, {} samples, flags {:03b}",
        sensor_id, temperature, samples, flags
    );
    println!();
}

fn example_random_access(buf: &[u8], record_bits: u32) -> Result<(), BitReadError> {
    println!("Example 3: Random access to one field");

    let second_record = record_bits as usize;
    let sensor_id: u32 = read_bits(buf, second_record, SENSOR_ID_BITS);
    println!("  Sensor id of record 1: {}", sensor_id);

    match read_bits_checked::<u32>(buf, buf.len() * 8 - 4, 8) {
        Ok(value) => println!("  Unexpected value {}", value),
        Err(err) => println!("  Rejected: {}", err),
    }

    let flags = read_bits_checked::<u32>(buf, record_bits as usize - 3, FLAGS_BITS)?;
    println!("  Flags of record 0: {:03b}\n", flags);
    Ok(())
}

fn example_widths() {
    println!("Example 4: Field widths");

    for value in [0u64, 1, 255, 256, 4095] {
        println!("  {:>5} needs {} bits", value, required_bits(value));
    }
    println!("  -40..=85 needs {} bits ZigZag-encoded", required_bits_signed(-40, 85));
}

fn setup_logging(directives: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// Packs fields LSB first; just enough to build sample input.
#[derive(Default)]
struct BitWriter {
    bytes: Vec<u8>,
    len_bits: usize,
}

impl BitWriter {
    fn push(&mut self, value: u32, num_bits: u32) {
        for i in 0..num_bits {
            if self.len_bits % 8 == 0 {
                self.bytes.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 1 << (self.len_bits % 8);
            }
            self.len_bits += 1;
        }
    }

    fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
