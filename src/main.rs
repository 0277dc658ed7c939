use clap::Parser;

mod cli;
mod workflow;

fn main() {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();

    println!("アセット生成を開始します: {}", args.output_dir.display());

    // ワークフローを実行し、失敗した場合はエラーを表示して異常終了します
    if let Err(e) = workflow::run(args) {
        eprintln!("エラー: {}", e);
        // 原因となった下位のエラーがあれば併せて表示する
        if let Some(source) = std::error::Error::source(&e) {
            eprintln!("  原因: {}", source);
        }
        std::process::exit(1);
    }
}
