use paraflow::layout::AvoidSpec;
use paraflow::{
    HeuristicMetrics, ParagraphStyle, ParagraphWriter, Pt, RecordingSurface, WriteOptions,
};

fn main() {
    env_logger::init();

    let surface = RecordingSurface::new(HeuristicMetrics::default());
    let mut writer = ParagraphWriter::with_style(
        surface,
        ParagraphStyle {
            width: Pt(320.0),
            spacing: 0.3,
            size: Pt(12.0),
            ..ParagraphStyle::default()
        },
    );

    // flow a paragraph around a figure occupying the left half of a band
    let opts = WriteOptions {
        avoid_left_of: vec![AvoidSpec::from((160.0, (540.0, 620.0)))],
        ..WriteOptions::default()
    };
    writer
        .write(&lipsum::lipsum(60), (Pt(36.0), Pt(700.0)), &opts)
        .expect("layout is feasible");

    for span in writer.surface().spans() {
        println!("{:7.1} {:7.1}  {}", span.coords.0 .0, span.coords.1 .0, span.text);
    }
}
