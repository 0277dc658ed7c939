// --- 依存モジュール ---

// icon_image モジュールから IconImage 構造体を利用します。
// ペイロードの空チェックと寸法の範囲チェックは IconImage 側で済んでいるため、
// このモジュールはレイアウトの組み立てに専念できます。
use super::icon_image::IconImage;

use std::fmt;
use std::fs;
use std::path::Path;

// --- フォーマット定数 ---

/// ファイルヘッダの長さ (バイト)。
const FILE_HEADER_LEN: usize = 6;
/// ディレクトリエントリ1件の長さ (バイト)。
const DIR_ENTRY_LEN: usize = 16;
/// リソース種別: 1 = アイコン (2 はカーソル)。
const RESOURCE_TYPE_ICON: u16 = 1;
/// カラープレーン数。ICOでは 1 固定。
const COLOR_PLANES: u16 = 1;
/// ピクセル当たりビット数。トゥルーカラー + アルファで 32 固定。
const BITS_PER_PIXEL: u16 = 32;

// --- 固定長レイアウト構造体 ---

/// ICOファイル先頭の6バイトヘッダ。
///
/// 手書きのオフセット演算をコード中に散らばらせず、
/// フィールド→バイト列の変換をこの構造体に閉じ込めます。
#[derive(Debug, PartialEq)]
struct IcoFileHeader {
    /// 格納する画像の数。
    image_count: u16,
}

impl IcoFileHeader {
    /// リトルエンディアンの固定レイアウトへシリアライズします。
    fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut bytes = [0u8; FILE_HEADER_LEN];
        // bytes[0..2] は予約領域で 0 のまま
        bytes[2..4].copy_from_slice(&RESOURCE_TYPE_ICON.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.image_count.to_le_bytes());
        bytes
    }
}

/// 画像1件分の16バイトディレクトリエントリ。
#[derive(Debug, PartialEq)]
struct IcoDirEntry {
    /// 幅 (px) の1バイト表現。0 は 256 を表す。
    width: u8,
    /// 高さ (px) の1バイト表現。正方形のため幅と同値。
    height: u8,
    /// 画像ペイロードのバイト長。
    data_len: u32,
    /// ファイル先頭からペイロードまでのオフセット。
    data_offset: u32,
}

impl IcoDirEntry {
    /// リトルエンディアンの固定レイアウトへシリアライズします。
    fn to_bytes(&self) -> [u8; DIR_ENTRY_LEN] {
        let mut bytes = [0u8; DIR_ENTRY_LEN];
        bytes[0] = self.width;
        bytes[1] = self.height;
        // bytes[2] はパレット数 (トゥルーカラーのため 0)、bytes[3] は予約領域
        bytes[4..6].copy_from_slice(&COLOR_PLANES.to_le_bytes());
        bytes[6..8].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.data_len.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.data_offset.to_le_bytes());
        bytes
    }
}

// --- エラー定義 ---

/// ICOファイルの保存時に発生する可能性のあるエラー。
#[derive(Debug, PartialEq)]
pub enum IcoFileError {
    /// 生成したバイト列をディスクへ書き込む際にエラーが発生した場合。
    SaveError(String),
}

// --- 公開構造体 ---

/// メモリ上に組み立てられたICOコンテナ。
///
/// 構築後は不変で、バイト列を取り出すか、そのままファイルへ保存するだけです。
pub struct IcoFile {
    /// レンダリング済みのコンテナ全体のバイト列。
    ico_data: Vec<u8>,
}

impl IcoFile {
    /// 検証済みの `IconImage` 1件から単一エントリのICOコンテナを組み立てます。
    ///
    /// 出力は「6バイトヘッダ + 16バイトエントリ + ペイロード」の連結で、
    /// 長さは常に `22 + ペイロード長` になります。ペイロードの中身は
    /// 一切加工せず、宣言されたオフセット位置へそのまま置きます。
    ///
    /// 現状の用途はファビコン1枚のみのため、公開APIは単一エントリに
    /// 限定しています (複数解像度対応は既知の制限。内部のレイアウト計算は
    /// エントリ数に依存しない累積オフセットで行っているため、必要になれば
    /// ここを広げるだけで済みます)。
    pub fn create_file(icon: &IconImage) -> Self {
        Self {
            ico_data: pack(std::slice::from_ref(icon)),
        }
    }

    /// `self.ico_data` に保持されているバイト列を、指定されたパスへ保存します。
    ///
    /// # 引数
    /// - `path`: ICOファイルの保存先 (例: `assets/favicon.ico`)。
    ///
    /// # 戻り値
    /// - `Ok(())`: 保存に成功した場合。
    /// - `Err(IcoFileError::SaveError)`: 書き込みに失敗した場合。
    pub fn save_to_path(&self, path: &Path) -> Result<(), IcoFileError> {
        fs::write(path, &self.ico_data).map_err(|e| IcoFileError::SaveError(e.to_string()))
    }

    // --- ゲッターメソッド ---

    pub fn ico_data(&self) -> &[u8] {
        &self.ico_data
    }
    /// コンテナ全体のバイト長を返します。
    pub fn len(&self) -> usize {
        self.ico_data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ico_data.is_empty()
    }
}

// --- レイアウト計算 ---

/// 画像のスライスからコンテナのバイト列を組み立てます。
///
/// 各エントリのオフセットは「ヘッダ + 全エントリ + 先行する全ペイロード」の
/// 累積和として計算します。エントリが1件の場合、最初のオフセットは
/// `6 + 16 * 1 = 22` になります。
fn pack(images: &[IconImage]) -> Vec<u8> {
    let payload_total: usize = images.iter().map(|img| img.len()).sum();
    let mut out =
        Vec::with_capacity(FILE_HEADER_LEN + DIR_ENTRY_LEN * images.len() + payload_total);

    let header = IcoFileHeader {
        image_count: images.len() as u16,
    };
    out.extend_from_slice(&header.to_bytes());

    // ディレクトリエントリを書き出しつつ、オフセットの累積和を進める
    let mut data_offset = FILE_HEADER_LEN + DIR_ENTRY_LEN * images.len();
    for image in images {
        let entry = IcoDirEntry {
            width: image.encoded_size(),
            height: image.encoded_size(),
            data_len: image.len() as u32,
            data_offset: data_offset as u32,
        };
        out.extend_from_slice(&entry.to_bytes());
        data_offset += image.len();
    }

    // ペイロードをエントリと同じ順で連結する
    for image in images {
        out.extend_from_slice(image.data());
    }

    out
}

// --- トレイト実装 ---

impl fmt::Display for IcoFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IcoFileError::SaveError(msg) => {
                write!(f, "ICOファイルの保存に失敗しました: {}", msg)
            }
        }
    }
}

impl std::error::Error for IcoFileError {}

// --- テストモジュール ---
