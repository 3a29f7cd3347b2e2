// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stream adapter guarding against empty provider responses.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use pagechat_core::{PagechatError, ProviderErrorKind};

pin_project_lite::pin_project! {
    /// Wraps a fragment stream so that completion without a single yielded
    /// fragment surfaces as an error instead of a silently empty answer.
    ///
    /// A provider error item terminates the stream: subsequent polls return
    /// `None`, keeping the error signal distinguishable from clean
    /// completion without repeating it.
    pub struct NonEmptyStream<S> {
        #[pin]
        inner: S,
        yielded: bool,
        done: bool,
    }
}

impl<S> NonEmptyStream<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            yielded: false,
            done: false,
        }
    }
}

impl<S> Stream for NonEmptyStream<S>
where
    S: Stream<Item = Result<String, PagechatError>>,
{
    type Item = Result<String, PagechatError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }

        match this.inner.poll_next(cx) {
            Poll::Ready(Some(Ok(fragment))) => {
                *this.yielded = true;
                Poll::Ready(Some(Ok(fragment)))
            }
            Poll::Ready(Some(Err(e))) => {
                *this.done = true;
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                *this.done = true;
                if *this.yielded {
                    Poll::Ready(None)
                } else {
                    Poll::Ready(Some(Err(PagechatError::provider_with_kind(
                        ProviderErrorKind::Unknown,
                        "empty response",
                    ))))
                }
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream::{self, StreamExt};

    #[tokio::test]
    async fn passes_fragments_through() {
        let inner = stream::iter(vec![Ok("a".to_string()), Ok("b".to_string())]);
        let mut guarded = NonEmptyStream::new(inner);

        assert_eq!(guarded.next().await.unwrap().unwrap(), "a");
        assert_eq!(guarded.next().await.unwrap().unwrap(), "b");
        assert!(guarded.next().await.is_none());
    }

    #[tokio::test]
    async fn empty_completion_yields_error() {
        let inner = stream::iter(Vec::<Result<String, PagechatError>>::new());
        let mut guarded = NonEmptyStream::new(inner);

        let err = guarded.next().await.unwrap().unwrap_err();
        assert_eq!(err.provider_kind(), Some(ProviderErrorKind::Unknown));
        assert!(err.to_string().contains("empty response"));
        assert!(guarded.next().await.is_none());
    }

    #[tokio::test]
    async fn error_item_terminates_stream() {
        let inner = stream::iter(vec![
            Ok("partial".to_string()),
            Err(PagechatError::provider_with_kind(
                ProviderErrorKind::Unknown,
                "aborted",
            )),
        ]);
        let mut guarded = NonEmptyStream::new(inner);

        assert_eq!(guarded.next().await.unwrap().unwrap(), "partial");
        assert!(guarded.next().await.unwrap().is_err());
        assert!(guarded.next().await.is_none());
    }
}
