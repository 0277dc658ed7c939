//! ブランドアセット (ソーシャルプレビューPNG・ファビコンICO) を生成するライブラリ。
//!
//! ドメイン層はSVGテンプレート・ラスタライズ・ICOコンテナ組み立ての3つで構成され、
//! いずれも同期・純粋な変換として実装されています。

pub mod domain;
pub mod error;
