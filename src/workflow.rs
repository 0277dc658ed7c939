//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! 「テンプレート → ラスタライズ → パッキング → 保存」という
//! アセット生成の具体的な処理フローを実装します。

use crate::cli::Args;
use brand_asset_gen::domain::brand::BrandStyle;
use brand_asset_gen::domain::ico_file::ico_container::IcoFile;
use brand_asset_gen::domain::ico_file::icon_image::IconImage;
use brand_asset_gen::domain::raster::SvgRenderer;
use brand_asset_gen::domain::svg_template;
use brand_asset_gen::error::AppError;
use std::fs;
use std::path::Path;

/// ソーシャルプレビュー画像の出力ファイル名。
const SOCIAL_CARD_FILE_NAME: &str = "og-image.png";
/// ファビコンの出力ファイル名。
const FAVICON_FILE_NAME: &str = "favicon.ico";

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: 2つのアセットをすべて生成できた場合。
/// * `Err(AppError)`: 処理中にエラーが発生した場合。ビルドツールのため、
///   どのステップの失敗も即座に全体を中断します。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 出力ディレクトリの準備
    // 存在しない場合は作成する。
    let output_dir = &args.output_dir;
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    // 2. ブランド設定の組み立て
    // 既定値をベースに、コマンドライン引数で指定された文言だけを上書きする。
    let mut style = BrandStyle::default();
    if let Some(title) = args.title {
        style.title = title;
    }
    if let Some(tagline) = args.tagline {
        style.tagline = tagline;
    }

    // 3. レンダラの準備
    // フォントDBの構築が重いため、1度だけ作って両方のアセットで使い回す。
    let renderer = SvgRenderer::new(args.font_path.as_deref())?;

    // 4. ソーシャルプレビューPNGの生成
    generate_social_card(&style, &renderer, output_dir)?;

    // 5. ファビコンICOの生成
    generate_favicon(&style, &renderer, output_dir)?;

    println!("すべてのアセットを生成しました: {}", output_dir.display());
    Ok(())
}

// --- private なヘルパー関数 ---

/// ソーシャルプレビュー画像 (PNG) を生成して保存します。
fn generate_social_card(
    style: &BrandStyle,
    renderer: &SvgRenderer,
    output_dir: &Path,
) -> Result<(), AppError> {
    println!(
        "[ソーシャルカード生成] {}x{}",
        style.social_width, style.social_height
    );

    let document = svg_template::social_card(style)?;
    let png_bytes = renderer.render_to_png(&document, style.social_width, style.social_height)?;

    let output_path = output_dir.join(SOCIAL_CARD_FILE_NAME);
    fs::write(&output_path, &png_bytes)?;

    println!(
        "  -> 完了: {} ({} バイト)",
        output_path.display(),
        png_bytes.len()
    );
    Ok(())
}

/// ファビコン (単一エントリのICO) を生成して保存します。
fn generate_favicon(
    style: &BrandStyle,
    renderer: &SvgRenderer,
    output_dir: &Path,
) -> Result<(), AppError> {
    println!(
        "[ファビコン生成] {0}x{0}",
        style.favicon_size
    );

    // PNGにラスタライズした結果を、検証を挟んでICOコンテナへ詰める。
    // レンダラ側で寸法の事後検証が済んでいるため、ここでの宣言寸法は
    // 実際のピクセル寸法と常に一致する。
    let document = svg_template::favicon(style)?;
    let png_bytes = renderer.render_to_png(&document, style.favicon_size, style.favicon_size)?;
    let icon = IconImage::new(png_bytes, style.favicon_size)?;
    let ico_file = IcoFile::create_file(&icon);

    let output_path = output_dir.join(FAVICON_FILE_NAME);
    ico_file.save_to_path(&output_path)?;

    println!(
        "  -> 完了: {} ({} バイト)",
        output_path.display(),
        ico_file.len()
    );
    Ok(())
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args_for(dir: &Path) -> Args {
        Args {
            output_dir: dir.to_path_buf(),
            title: Some("Test".to_string()),
            tagline: None,
            font_path: None,
        }
    }

    /// run() が2つのアセットを出力ディレクトリへ書き出すことをテストします。
    #[test]
    fn run_writes_both_assets() {
        let dir = tempdir().expect("一時ディレクトリの作成に失敗");
        run(args_for(dir.path())).expect("run が失敗");

        assert!(dir.path().join(SOCIAL_CARD_FILE_NAME).exists());
        assert!(dir.path().join(FAVICON_FILE_NAME).exists());
    }

    /// 出力ディレクトリが存在しない場合に作成されることをテストします。
    #[test]
    fn run_creates_missing_output_dir() {
        let dir = tempdir().expect("一時ディレクトリの作成に失敗");
        let nested = dir.path().join("nested").join("assets");
        run(args_for(&nested)).expect("run が失敗");
        assert!(nested.join(FAVICON_FILE_NAME).exists());
    }

    /// 生成されたソーシャルカードPNGが既定の寸法を持つことをテストします。
    #[test]
    fn social_card_png_has_expected_dimensions() {
        use image::GenericImageView;

        let dir = tempdir().expect("一時ディレクトリの作成に失敗");
        run(args_for(dir.path())).expect("run が失敗");

        let bytes = fs::read(dir.path().join(SOCIAL_CARD_FILE_NAME)).expect("読み込みに失敗");
        let decoded = image::load_from_memory(&bytes).expect("PNGのデコードに失敗");
        assert_eq!(decoded.dimensions(), (1200, 630));
    }

    /// 生成されたICOのヘッダと、オフセット22のPNGシグネチャをテストします。
    #[test]
    fn favicon_ico_wraps_png_payload() {
        let dir = tempdir().expect("一時ディレクトリの作成に失敗");
        run(args_for(dir.path())).expect("run が失敗");

        let bytes = fs::read(dir.path().join(FAVICON_FILE_NAME)).expect("読み込みに失敗");
        // ヘッダ: 予約 0,0 / 種別 1 / 画像数 1
        assert_eq!(&bytes[0..6], &[0, 0, 1, 0, 1, 0]);
        // エントリ: 32x32
        assert_eq!(bytes[6], 32);
        assert_eq!(bytes[7], 32);
        // ペイロードはPNGシグネチャで始まる
        assert_eq!(&bytes[22..30], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
        // 宣言されたペイロード長が実際の残りバイト数と一致する
        let declared = u32::from_le_bytes([bytes[14], bytes[15], bytes[16], bytes[17]]) as usize;
        assert_eq!(declared, bytes.len() - 22);
    }
}
