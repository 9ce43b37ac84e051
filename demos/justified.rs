use paraflow::{
    HeuristicMetrics, Justify, ParagraphStyle, ParagraphWriter, Pt, RecordingSurface, WriteOptions,
};

fn main() {
    env_logger::init();

    let surface = RecordingSurface::new(HeuristicMetrics::default());
    let mut writer = ParagraphWriter::with_style(
        surface,
        ParagraphStyle {
            width: Pt(260.0),
            spacing: 0.2,
            size: Pt(11.0),
            ..ParagraphStyle::default()
        },
    );

    let opts = WriteOptions {
        justify: Justify::Full,
        ..WriteOptions::default()
    };
    let placed = writer
        .place(&lipsum::lipsum(40), (Pt(36.0), Pt(700.0)), &opts)
        .expect("layout is feasible");

    for line in &placed {
        match line.word_gap {
            Some(gap) => println!("{:7.1}  [gap {:5.2}]  {}", line.origin.1 .0, gap.0, line.text),
            None => println!("{:7.1}  [flush   ]  {}", line.origin.1 .0, line.text),
        }
    }
}
