//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 저장소 형식(BSON 문서 등)을 알지 못하며,
//! 저장 형태로의 변환은 `repositories` 계층의 매핑 함수가 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (핵심 비즈니스 엔티티)
//! ├── ports/        ← 저장소 계약
//! ├── models/       ← 요청 컨텍스트 등 값 객체
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
