use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 生成したアセットの出力先フォルダのパス (オプション: デフォルトは assets)
    #[arg(short, long, default_value = "assets")]
    pub output_dir: PathBuf,

    /// ソーシャルカードの見出しに使うタイトル (オプション: デフォルトは組み込みの文言)
    #[arg(short, long)]
    pub title: Option<String>,

    /// 見出しの下に添えるキャッチコピー (オプション)
    #[arg(long)]
    pub tagline: Option<String>,

    /// テキスト描画に使うTTF/OTFフォントファイルのパス (オプション: デフォルトはシステムフォント)
    #[arg(short, long)]
    pub font_path: Option<PathBuf>,
}
